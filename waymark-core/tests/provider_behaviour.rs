//! Behavioural tests for preparing provider listings.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waymark_core::{Provider, mark_default, sort_default_first};

#[fixture]
fn providers() -> RefCell<Vec<Provider>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn default_pid() -> RefCell<Option<String>> {
    RefCell::new(None)
}

#[fixture]
fn listing() -> RefCell<Vec<Provider>> {
    RefCell::new(Vec::new())
}

fn geocoders(default: Option<&str>) -> Vec<Provider> {
    [
        ("nominatim", "Nominatim"),
        ("photon", "Photon"),
        ("opencage", "OpenCage"),
    ]
    .into_iter()
    .map(|(pid, name)| Provider::new(pid, name).with_default(default == Some(pid)))
    .collect()
}

#[given("geocoders Nominatim, Photon and OpenCage with Photon as the default")]
fn given_photon_default(
    #[from(providers)] providers: &RefCell<Vec<Provider>>,
    #[from(default_pid)] default_pid: &RefCell<Option<String>>,
) {
    *providers.borrow_mut() = geocoders(Some("photon"));
    *default_pid.borrow_mut() = Some("photon".to_owned());
}

#[given("geocoders Nominatim, Photon and OpenCage without a default")]
fn given_no_default(
    #[from(providers)] providers: &RefCell<Vec<Provider>>,
    #[from(default_pid)] default_pid: &RefCell<Option<String>>,
) {
    *providers.borrow_mut() = geocoders(None);
    *default_pid.borrow_mut() = None;
}

#[when("I prepare the provider listing")]
fn when_prepare(
    #[from(providers)] providers: &RefCell<Vec<Provider>>,
    #[from(default_pid)] default_pid: &RefCell<Option<String>>,
    #[from(listing)] listing: &RefCell<Vec<Provider>>,
) {
    let providers = providers.borrow();
    let marked = match default_pid.borrow().as_deref() {
        Some(pid) => mark_default(&providers, pid),
        None => providers.clone(),
    };
    *listing.borrow_mut() = sort_default_first(&marked);
}

fn listed_pids(listing: &RefCell<Vec<Provider>>) -> Vec<String> {
    listing.borrow().iter().map(|p| p.pid.clone()).collect()
}

#[then("Photon is listed first")]
fn then_photon_first(#[from(listing)] listing: &RefCell<Vec<Provider>>) {
    let first = listing.borrow().first().cloned().expect("listing is not empty");
    assert_eq!(first.pid, "photon");
}

#[then("Photon is labelled as the default")]
fn then_photon_labelled(#[from(listing)] listing: &RefCell<Vec<Provider>>) {
    let listing = listing.borrow();
    let photon = listing
        .iter()
        .find(|p| p.pid == "photon")
        .expect("photon is listed");
    assert_eq!(photon.name, "Photon (default)");
}

#[then("the remaining providers keep their order")]
fn then_rest_in_order(#[from(listing)] listing: &RefCell<Vec<Provider>>) {
    assert_eq!(listed_pids(listing), ["photon", "nominatim", "opencage"]);
}

#[then("the providers keep their original order")]
fn then_original_order(#[from(listing)] listing: &RefCell<Vec<Provider>>) {
    assert_eq!(listed_pids(listing), ["nominatim", "photon", "opencage"]);
}

#[then("no provider is labelled as the default")]
fn then_no_label(#[from(listing)] listing: &RefCell<Vec<Provider>>) {
    assert!(
        listing.borrow().iter().all(|p| !p.name.ends_with("(default)")),
        "expected no default label"
    );
}

#[scenario(path = "tests/features/provider_listing.feature", index = 0)]
fn scenario_default_first(
    providers: RefCell<Vec<Provider>>,
    default_pid: RefCell<Option<String>>,
    listing: RefCell<Vec<Provider>>,
) {
    let _ = (providers, default_pid, listing);
}

#[scenario(path = "tests/features/provider_listing.feature", index = 1)]
fn scenario_no_default(
    providers: RefCell<Vec<Provider>>,
    default_pid: RefCell<Option<String>>,
    listing: RefCell<Vec<Provider>>,
) {
    let _ = (providers, default_pid, listing);
}
