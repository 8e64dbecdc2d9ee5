//! Seed job board loaded at startup.

use chrono::NaiveDate;
use shared_types::{ClientRequest, RequestStatus};

fn posted(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The two pending requests every fresh store starts with.
pub fn seed_client_requests() -> Vec<ClientRequest> {
    vec![
        ClientRequest {
            id: "1".to_string(),
            client_name: "Sarah Johnson".to_string(),
            area: "Downtown".to_string(),
            rooms: 3,
            tasks: vec![
                "Cleaning".to_string(),
                "Laundry".to_string(),
                "Kitchen".to_string(),
            ],
            requirements: "Deep cleaning of 3-bedroom apartment, including bathroom \
                           sanitization and kitchen deep clean."
                .to_string(),
            payment_offered: 150,
            duration: "4 hours".to_string(),
            date_posted: posted(2025, 1, 9),
            status: RequestStatus::Pending,
        },
        ClientRequest {
            id: "2".to_string(),
            client_name: "Michael Chen".to_string(),
            area: "Uptown".to_string(),
            rooms: 2,
            tasks: vec!["Cleaning".to_string(), "Organizing".to_string()],
            requirements: "Regular weekly cleaning service for 2-bedroom condo. Focus on \
                           organizing and maintaining cleanliness."
                .to_string(),
            payment_offered: 120,
            duration: "3 hours".to_string(),
            date_posted: posted(2025, 1, 8),
            status: RequestStatus::Pending,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_all_pending() {
        let requests = seed_client_requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.status == RequestStatus::Pending));
        assert_eq!(requests[0].payment_offered, 150);
        assert_eq!(requests[1].date_posted, posted(2025, 1, 8));
    }
}
