use super::*;

#[test]
fn default_tab_is_the_brt_list() {
    assert_eq!(UiState::default().active_tab, ActiveTab::Brts);
}

#[test]
fn tab_order_is_stable() {
    assert_eq!(
        ActiveTab::all(),
        [
            ActiveTab::Brts,
            ActiveTab::Create,
            ActiveTab::Dashboard,
            ActiveTab::Notifications,
        ]
    );
}

#[test]
fn tab_labels() {
    assert_eq!(ActiveTab::Brts.label(), "My BRTs");
    assert_eq!(ActiveTab::Create.label(), "Create BRT");
    assert_eq!(ActiveTab::Dashboard.label(), "Dashboard");
    assert_eq!(ActiveTab::Notifications.label(), "Notifications");
}
