//! Hospitals compiled into the binary: major facilities in Delhi, India.

use crate::models::HospitalRecord;

/// (name, address, phone, latitude, longitude)
const DELHI_HOSPITALS: &[(&str, &str, &str, f64, f64)] = &[
    (
        "All India Institute of Medical Sciences (AIIMS)",
        "Ansari Nagar East, New Delhi, Delhi 110029",
        "+911126588500",
        28.5672,
        77.2090,
    ),
    (
        "Safdarjung Hospital",
        "Ansari Nagar West, New Delhi, Delhi 110029",
        "+911126707000",
        28.5693,
        77.2038,
    ),
    (
        "Lok Nayak Hospital",
        "Jawahar Lal Nehru Marg, New Delhi, Delhi 110002",
        "+911123232400",
        28.6394,
        77.2311,
    ),
    (
        "Ram Manohar Lohia Hospital",
        "Baba Kharak Singh Marg, New Delhi, Delhi 110001",
        "+911123404446",
        28.6273,
        77.2062,
    ),
    (
        "Guru Teg Bahadur Hospital",
        "Tahirpur Road, Dilshad Garden, Delhi 110095",
        "+911122586262",
        28.6824,
        77.3142,
    ),
    (
        "Moolchand Hospital",
        "Lala Lajpat Rai Marg, New Delhi, Delhi 110024",
        "+911142000000",
        28.5714,
        77.2372,
    ),
    (
        "Max Super Speciality Hospital, Saket",
        "2, Press Enclave Road, Saket, New Delhi, Delhi 110017",
        "+911126515050",
        28.5280,
        77.2107,
    ),
    (
        "Fortis Hospital, Vasant Kunj",
        "Sector B, Pocket 10, Aruna Asaf Ali Marg, Vasant Kunj, Delhi 110070",
        "+911142776222",
        28.5223,
        77.1579,
    ),
    (
        "Indraprastha Apollo Hospitals",
        "Sarita Vihar, Delhi Mathura Road, New Delhi, Delhi 110076",
        "+911171791090",
        28.5421,
        77.2938,
    ),
    (
        "Sir Ganga Ram Hospital",
        "Rajinder Nagar, New Delhi, Delhi 110060",
        "+911125750000",
        28.6387,
        77.1901,
    ),
    (
        "Batra Hospital",
        "1, Tughlakabad Institutional Area, Mehrauli Badarpur Road, New Delhi, Delhi 110062",
        "+911129958747",
        28.5129,
        77.2502,
    ),
    (
        "Holy Family Hospital",
        "Okhla Road, Jamia Nagar, New Delhi, Delhi 110025",
        "+911126845900",
        28.5623,
        77.2908,
    ),
    (
        "Deen Dayal Upadhyay Hospital",
        "Hari Nagar, New Delhi, Delhi 110064",
        "+911125494402",
        28.6320,
        77.1304,
    ),
    (
        "Rajiv Gandhi Super Speciality Hospital",
        "Tahirpur Road, Dilshad Garden, Delhi 110095",
        "+911122890600",
        28.6862,
        77.3162,
    ),
    (
        "BLK Super Speciality Hospital",
        "Pusa Road, New Delhi, Delhi 110005",
        "+911130403040",
        28.6440,
        77.1789,
    ),
];

pub(super) fn delhi_hospitals() -> Vec<HospitalRecord> {
    DELHI_HOSPITALS
        .iter()
        .map(|&(name, address, phone, lat, lon)| HospitalRecord::new(name, address, phone, lat, lon))
        .collect()
}
