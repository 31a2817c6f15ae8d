use cadence_core::{
    aggregate, sections, Cadence, Contact, ContactId, ContactStatus, MarkerColor, NewContact,
    StoredDate,
};
use chrono::NaiveDate;

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn contact(id: &str, cadence: Cadence, start: &str, status: ContactStatus) -> Contact {
    let mut contact = Contact::from_new(
        ContactId::new(id),
        NewContact::new(format!("Contact {id}"), cadence, day(start)),
    );
    contact.status = status;
    contact
}

#[test]
fn one_marker_per_expiry_date() {
    let contacts = vec![
        contact("1", Cadence::Daily, "2024-01-01", ContactStatus::Active),
        contact("2", Cadence::Weekly, "2024-01-01", ContactStatus::Overdue),
        contact("3", Cadence::Monthly, "2024-01-01", ContactStatus::Expired),
    ];

    let markers = aggregate(&contacts);

    assert_eq!(markers.len(), 3);
    assert_eq!(markers[&day("2024-01-03")].color, MarkerColor::Cyan);
    assert_eq!(markers[&day("2024-01-09")].color, MarkerColor::Green);
    assert_eq!(markers[&day("2024-02-01")].color, MarkerColor::Purple);
    assert!(markers.values().all(|marker| marker.marked));
}

#[test]
fn shared_expiry_date_takes_color_of_last_processed_contact() {
    // Daily from 2024-01-13 and Bi-Weekly from 2023-12-31 both expire on 2024-01-15.
    let daily = contact("1", Cadence::Daily, "2024-01-13", ContactStatus::Active);
    let bi_weekly = contact("2", Cadence::BiWeekly, "2023-12-31", ContactStatus::Active);

    let forward = aggregate(&[daily.clone(), bi_weekly.clone()]);
    assert_eq!(forward.len(), 1);
    let marker = &forward[&day("2024-01-15")];
    assert_eq!(marker.color, MarkerColor::Navy);
    assert_eq!(marker.colors, vec![MarkerColor::Cyan, MarkerColor::Navy]);

    let reversed = aggregate(&[bi_weekly, daily]);
    assert_eq!(reversed[&day("2024-01-15")].color, MarkerColor::Cyan);
}

#[test]
fn repeated_cadence_on_one_day_is_listed_once() {
    let first = contact("1", Cadence::Weekly, "2024-01-01", ContactStatus::Active);
    let second = contact("2", Cadence::Weekly, "2024-01-01", ContactStatus::Active);

    let markers = aggregate(&[first, second]);

    assert_eq!(markers[&day("2024-01-09")].colors, vec![MarkerColor::Green]);
}

#[test]
fn unrecognized_cadence_is_black_and_malformed_expiry_is_skipped() {
    let odd = contact("1", Cadence::from_label("Yearly"), "2024-05-05", ContactStatus::Active);
    let mut broken = contact("2", Cadence::Daily, "2024-05-05", ContactStatus::Active);
    broken.expiry_date = StoredDate::parse("???");

    let markers = aggregate(&[odd, broken]);

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[&day("2024-05-05")].color, MarkerColor::Black);
    assert_eq!(MarkerColor::Black.hex(), "#000000");
}

#[test]
fn marker_colors_match_cadence_palette() {
    assert_eq!(MarkerColor::for_cadence(&Cadence::Daily).hex(), "#00FFFF");
    assert_eq!(MarkerColor::for_cadence(&Cadence::Weekly).hex(), "#1ac983");
    assert_eq!(MarkerColor::for_cadence(&Cadence::BiWeekly).hex(), "#0e2c4d");
    assert_eq!(MarkerColor::for_cadence(&Cadence::Monthly).hex(), "#7d2e85");
}

#[test]
fn sections_group_by_status_in_fixed_order() {
    let contacts = vec![
        contact("1", Cadence::Daily, "2024-01-01", ContactStatus::Expired),
        contact("2", Cadence::Daily, "2024-01-01", ContactStatus::Active),
        contact("3", Cadence::Daily, "2024-01-01", ContactStatus::Overdue),
        contact("4", Cadence::Daily, "2024-01-01", ContactStatus::Active),
    ];

    let grouped = sections(&contacts);

    let titles = grouped.iter().map(|section| section.title).collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec![
            "Active Contacts",
            "Overdue Contacts",
            "Recently Expired Contacts"
        ]
    );
    let active_ids = grouped[0]
        .contacts
        .iter()
        .map(|contact| contact.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(active_ids, vec!["2", "4"]);
    assert_eq!(grouped[1].contacts.len(), 1);
    assert_eq!(grouped[2].contacts.len(), 1);
}

#[test]
fn sections_are_present_even_when_empty() {
    let grouped = sections(&[]);

    assert_eq!(grouped.len(), 3);
    assert!(grouped.iter().all(|section| section.contacts.is_empty()));
}
