use super::*;

#[test]
fn vehicle_accepts_underscore_id_and_image_url() {
    let raw = serde_json::json!({
        "_id": "v1",
        "manufacturer": "Toyota",
        "model": "Corolla",
        "rent": 45.5,
        "capacity": 5,
        "transmission": "automatic",
        "imageUrl": "https://cdn.example.com/corolla.png",
        "company": "c1"
    });
    let vehicle: Vehicle = serde_json::from_value(raw).unwrap();
    assert_eq!(vehicle.id, "v1");
    assert_eq!(vehicle.image.as_deref(), Some("https://cdn.example.com/corolla.png"));
    assert_eq!(vehicle.company.as_deref(), Some("c1"));
    assert_eq!(vehicle.display_name(), "Toyota Corolla");
}

#[test]
fn vehicle_without_image_or_company_decodes() {
    let raw = serde_json::json!({
        "id": "v2",
        "manufacturer": "Honda",
        "model": "Civic",
        "rent": 40.0,
        "capacity": 4,
        "transmission": "manual"
    });
    let vehicle: Vehicle = serde_json::from_value(raw).unwrap();
    assert!(vehicle.image.is_none());
    assert!(vehicle.company.is_none());
}

#[test]
fn booking_unknown_status_maps_to_other() {
    let raw = serde_json::json!({
        "_id": "b1",
        "vehicleId": "v1",
        "userId": "u1",
        "companyId": "c1",
        "startDate": "2026-01-01",
        "endDate": "2026-01-03",
        "status": "on-hold"
    });
    let booking: Booking = serde_json::from_value(raw).unwrap();
    assert_eq!(booking.status, BookingStatus::Other);
    assert_eq!(booking.status.label(), "Unknown");
    assert!(!booking.intercity);
    assert!(booking.driver_id.is_none());
}

#[test]
fn booking_missing_status_defaults_to_pending() {
    let raw = serde_json::json!({
        "vehicleId": "v1",
        "userId": "u1",
        "companyId": "c1",
        "startDate": "2026-01-01",
        "endDate": "2026-01-03",
        "intercity": true,
        "cityName": "Lahore"
    });
    let booking: Booking = serde_json::from_value(raw).unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.city_name, "Lahore");
}

#[test]
fn new_booking_omits_absent_driver() {
    let body = NewBooking {
        vehicle_id: "v1".to_owned(),
        user_id: "u1".to_owned(),
        company_id: "c1".to_owned(),
        driver_id: None,
        start_date: "2026-01-01".to_owned(),
        end_date: "2026-01-02".to_owned(),
        intercity: false,
        city_name: "Karachi".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("driverId").is_none());
    assert_eq!(value["vehicleId"], "v1");
    assert_eq!(value["cityName"], "Karachi");
}

#[test]
fn damage_report_accepts_booking_alias() {
    let raw = serde_json::json!({
        "_id": "d1",
        "booking": "b1",
        "description": "Scratched bumper",
        "status": "resolved",
        "images": ["a.png", "b.png"]
    });
    let report: DamageReport = serde_json::from_value(raw).unwrap();
    assert_eq!(report.booking_id, "b1");
    assert_eq!(report.status, DamageStatus::Resolved);
    assert_eq!(report.images.len(), 2);
}

#[test]
fn auth_response_company_only() {
    let raw = serde_json::json!({
        "token": "t",
        "company": { "_id": "c1", "name": "Acme Rentals", "email": "ops@acme.test" }
    });
    let resp: AuthResponse = serde_json::from_value(raw).unwrap();
    assert!(resp.user.is_none());
    assert_eq!(resp.company.unwrap().name, "Acme Rentals");
}
