use super::*;

fn identity(name: &str, admin: bool, trainer: bool) -> Identity {
    Identity { id: 1, name: name.to_owned(), mail: "a@gym.pl".to_owned(), admin, trainer }
}

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(Some(&identity("Ola", false, false))), "Welcome back, Ola!");
}

#[test]
fn greeting_falls_back_without_name() {
    assert_eq!(greeting(Some(&identity("  ", false, false))), "Welcome back!");
    assert_eq!(greeting(None), "Welcome back!");
}

#[test]
fn role_badges_list_granted_roles() {
    assert_eq!(role_badges(Some(&identity("Ola", true, true))), vec!["Admin", "Trainer"]);
    assert_eq!(role_badges(Some(&identity("Ola", false, true))), vec!["Trainer"]);
    assert!(role_badges(None).is_empty());
}
