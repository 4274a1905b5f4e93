use crate::views::{UserDetails, UserListItem};

use ud_directory::{Address, Company, DirectoryUser};

fn leanne() -> DirectoryUser {
    DirectoryUser {
        id: 1,
        name: "Leanne Graham".into(),
        email: "Sincere@april.biz".into(),
        username: "Bret".into(),
        phone: "1-770-736-8031 x56442".into(),
        website: "hildegard.org".into(),
        address: Address {
            street: "Kulas Light".into(),
            city: "Gwenborough".into(),
            zipcode: "92998-3874".into(),
        },
        company: Company {
            name: "Romaguera-Crona".into(),
        },
    }
}

#[test]
fn test_list_item_keeps_id_name_email() {
    let item = UserListItem::from(&leanne());

    assert_eq!(
        item,
        UserListItem {
            id: 1,
            name: "Leanne Graham".into(),
            email: "Sincere@april.biz".into(),
        }
    );
}

#[test]
fn test_details_formats_username_and_location() {
    let details = UserDetails::from(&leanne());

    assert_eq!(details.username, "@Bret");
    assert_eq!(details.location, "Kulas Light, Gwenborough, 92998-3874");
    assert_eq!(details.company, "Romaguera-Crona");
    assert_eq!(details.contact.website, "hildegard.org");
}

#[test]
fn test_details_serializes_nested_contact() {
    let value = serde_json::to_value(UserDetails::from(&leanne())).unwrap();

    assert_eq!(value["contact"]["phone"], "1-770-736-8031 x56442");
    assert_eq!(value["id"], 1);
}
