use anyhow::{Context, Result};

use std::fs;
use std::path::{Path, PathBuf};

use crate::booking::BookingRecord;

const TITLE: &str = "Indian Railways E-Ticket";
const CLOSING: &str = "Have a pleasant and safe journey!";

/// Text shown before the passenger confirms.
pub fn summary(record: &BookingRecord) -> String {
    format!(
        "Passenger: {}\nAge: {}\nTrain: {}\nFrom: {} -> {}\nDate: {}\nClass: {}\nCoach: {}, Seat: {}\nFare: Rs {}",
        record.name(),
        record.age(),
        record.train(),
        record.source(),
        record.destination(),
        record.date(),
        record.fare_class(),
        record.coach(),
        record.seat(),
        record.fare(),
    )
}

/// Single-page ticket: title, labelled fields, closing line.
pub fn render(record: &BookingRecord) -> String {
    let rule = "=".repeat(40);
    let fields = [
        ("Passenger Name", record.name().to_string()),
        ("Age", record.age().to_string()),
        ("Train", record.train().to_string()),
        ("Class", record.fare_class().to_string()),
        ("From", record.source().to_string()),
        ("To", record.destination().to_string()),
        ("Date of Journey", record.date().to_string()),
        (
            "Coach",
            format!("{}    Seat No: {}", record.coach(), record.seat()),
        ),
        ("Total Fare", format!("Rs {}", record.fare())),
    ];

    let mut page = format!("{rule}\n{TITLE:^40}\n{rule}\n\n");
    for (label, value) in fields {
        page.push_str(&format!("{:>16}: {}\n", label, value));
    }
    page.push_str(&format!("\n{CLOSING}\n"));
    page
}

/// `<name>_Train_Ticket.txt`, with path separators in the name replaced.
pub fn file_name(record: &BookingRecord) -> String {
    let name: String = record
        .name()
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("{name}_Train_Ticket.txt")
}

pub fn write(record: &BookingRecord, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(file_name(record));
    fs::write(&path, render(record))
        .with_context(|| format!("Failed to write ticket {}", path.display()))?;
    tracing::info!(path = %path.display(), "ticket written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingRequest;
    use crate::config::NetworkConfig;
    use crate::schema::FareClass;
    use crate::seat::SeatAssignment;

    fn record(name: &str) -> BookingRecord {
        let engine = NetworkConfig::default().fare_engine().unwrap();
        BookingRequest {
            name: name.to_string(),
            age: "61".to_string(),
            source: "Chennai".to_string(),
            destination: "Bangalore".to_string(),
            train: "Shatabdi Express".to_string(),
            date: "01/01/2027".to_string(),
            fare_class: Some(FareClass::Ac3Tier),
        }
        .validate(&engine)
        .unwrap()
        .into_record(SeatAssignment::fixed("A1", 72))
    }

    #[test]
    fn render_has_title_fields_and_closing() {
        let page = render(&record("Ravi Kumar"));
        assert!(page.contains(TITLE));
        assert!(page.contains("Passenger Name: Ravi Kumar"));
        assert!(page.contains("Age: 61"));
        assert!(page.contains("Train: Shatabdi Express"));
        assert!(page.contains("Class: AC 3-Tier"));
        assert!(page.contains("From: Chennai"));
        assert!(page.contains("To: Bangalore"));
        assert!(page.contains("Date of Journey: 01/01/2027"));
        assert!(page.contains("Coach: A1    Seat No: 72"));
        assert!(page.contains("Total Fare: Rs 875.00"));
        assert!(page.trim_end().ends_with(CLOSING));
    }

    #[test]
    fn summary_shows_route_and_fare() {
        let text = summary(&record("Ravi Kumar"));
        assert!(text.contains("From: Chennai -> Bangalore"));
        assert!(text.contains("Coach: A1, Seat: 72"));
        assert!(text.ends_with("Fare: Rs 875.00"));
    }

    #[test]
    fn file_name_cannot_escape_the_output_dir() {
        assert_eq!(file_name(&record("Ravi")), "Ravi_Train_Ticket.txt");
        assert_eq!(file_name(&record("../etc/x")), ".._etc_x_Train_Ticket.txt");
    }

    #[test]
    fn write_creates_the_ticket_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tickets");
        let path = write(&record("Meera"), &out).unwrap();
        assert_eq!(path, out.join("Meera_Train_Ticket.txt"));
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains("Passenger Name: Meera"));
    }
}
