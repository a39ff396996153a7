use super::*;

fn identity(admin: bool, trainer: bool) -> Identity {
    Identity { id: 1, name: "Piotr".to_owned(), mail: "piotr@gym.pl".to_owned(), admin, trainer }
}

fn labels(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

#[test]
fn anonymous_sees_only_common_links() {
    assert_eq!(labels(&nav_links(None)), ["Your Workouts", "1RM Calculator"]);
}

#[test]
fn member_sees_no_role_links() {
    assert_eq!(labels(&nav_links(Some(&identity(false, false)))), ["Your Workouts", "1RM Calculator"]);
}

#[test]
fn trainer_sees_trainer_panel_first() {
    let links = nav_links(Some(&identity(false, true)));
    assert_eq!(labels(&links), ["Trainer Panel", "Your Workouts", "1RM Calculator"]);
    assert_eq!(links[0].href, "/trainer-panel");
    assert_eq!(links[1].href, "/your-workouts");
}

#[test]
fn admin_sees_admin_link_last() {
    let links = nav_links(Some(&identity(true, false)));
    assert_eq!(labels(&links), ["Your Workouts", "1RM Calculator", "Admin"]);
    assert_eq!(links[2].href, "/admin");
}

#[test]
fn admin_trainer_sees_both_role_links() {
    assert_eq!(
        labels(&nav_links(Some(&identity(true, true)))),
        ["Trainer Panel", "Your Workouts", "1RM Calculator", "Admin"]
    );
}
