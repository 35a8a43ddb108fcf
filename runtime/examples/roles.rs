//! Modeling user roles as a variant, one tag per authentication state.

use match_variant::variant;

variant! {
    name: Role,
    tags {
        anonymous();
        unauthenticated(String, String);
        normal(String);
        admin(String, bool);
    }
}

fn main() {
    let users = [
        Role::anonymous(),
        Role::unauthenticated("chris".to_string(), "bad password".to_string()),
        Role::normal("jessie".to_string()),
        Role::admin("morgan".to_string(), true),
        Role::admin("alex".to_string(), false),
    ];

    for user in users {
        match user {
            Role::anonymous() => println!("User has not provided credentials"),
            Role::unauthenticated(name, pw) => {
                println!("User {} needs to log in with {}", name, pw)
            },
            Role::normal(name) => println!("User {} is logged in", name),
            Role::admin(name, can_edit) if can_edit => {
                println!("User {} can edit", name)
            },
            Role::admin(name, _) => println!("User {} can view but not edit", name),
        }
    }
}
