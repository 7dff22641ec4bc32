use cadence_core::{ScheduleClient, Wizard, WizardBuilder};
use jiff::civil::date;
use url::Url;
use wiremock::MockServer;

/// Helper function to create a client pointed at a mock scheduling service
pub fn client_for(server: &MockServer) -> ScheduleClient {
    let endpoint = Url::parse(&format!("{}/api/schedule", server.uri()))
        .expect("Failed to parse mock endpoint");
    ScheduleClient::new(endpoint).expect("Failed to create client")
}

/// Helper function to create a client for a port nothing listens on
pub fn unreachable_client() -> ScheduleClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read address").port();
    drop(listener);
    let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/api/schedule"))
        .expect("Failed to parse endpoint");
    ScheduleClient::new(endpoint).expect("Failed to create client")
}

/// Helper function to drive a wizard to the confirmation step
pub fn confirmed_wizard(builder: WizardBuilder, preferred: Option<u32>) -> Wizard {
    let mut wizard = builder.build();
    wizard.submit_name("Leg day").expect("Failed to submit name");
    if preferred.is_some() {
        wizard
            .submit_preferred_count(preferred)
            .expect("Failed to submit count");
    }
    wizard
        .submit_dates(vec![date(2024, 6, 5), date(2024, 6, 1), date(2024, 6, 3)])
        .expect("Failed to submit dates");
    wizard
        .confirm_times(vec!["09:00".to_string()])
        .expect("Failed to confirm day 1");
    wizard
        .confirm_times(vec!["07:00".to_string(), "18:00".to_string()])
        .expect("Failed to confirm day 2");
    wizard
        .confirm_times(vec!["12:00".to_string()])
        .expect("Failed to confirm day 3");
    wizard
}
