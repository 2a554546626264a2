use crate::models::Coordinate;

/// Text of an SOS alert for one patient location
#[derive(Debug, Clone)]
pub struct AlertMessage {
    location: Coordinate,
    note: Option<String>,
}

impl AlertMessage {
    /// Blank notes are dropped
    pub fn new(location: Coordinate, note: Option<&str>) -> Self {
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        Self { location, note }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn body(&self) -> String {
        let mut body = format!(
            "🚨 EMERGENCY ALERT 🚨\nPatient Location: {}\nCoordinates: {}\n",
            self.location.map_link(),
            self.location
        );
        if let Some(note) = &self.note {
            body.push_str(&format!("Message: {}\n", note));
        }
        body.push_str("Require immediate medical assistance!");
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_with_note() {
        let msg = AlertMessage::new(
            Coordinate::new(28.6304, 77.2177),
            Some("Cardiac emergency! Patient unconscious."),
        );
        assert_eq!(
            msg.body(),
            "🚨 EMERGENCY ALERT 🚨\n\
             Patient Location: https://www.google.com/maps?q=28.6304,77.2177\n\
             Coordinates: 28.6304, 77.2177\n\
             Message: Cardiac emergency! Patient unconscious.\n\
             Require immediate medical assistance!"
        );
    }

    #[test]
    fn test_body_without_note() {
        let msg = AlertMessage::new(Coordinate::new(-33.5, 151.25), Some("   "));
        let body = msg.body();
        assert!(body.contains("https://www.google.com/maps?q=-33.5,151.25"));
        assert!(!body.contains("Message:"));
        assert!(body.ends_with("Require immediate medical assistance!"));
    }
}
