use crate::output::ConnectionTestReport;
use connectors::lookup::ConnectionTester;
use model::{execution::connection::ConnectionTestRequest, form::FormRecord};
use rules::feedback::ConnectionTestBanner;
use tracing::error;

/// Runs the console's connection test for the details in `record`.
pub async fn test_connection(
    tester: &dyn ConnectionTester,
    record: &FormRecord,
) -> ConnectionTestReport {
    let request = ConnectionTestRequest::from_record(record);
    let outcome = tester.test_connection(&request).await;
    let banner = ConnectionTestBanner::from_outcome(&outcome);

    let error = outcome.err().map(|e| {
        error!("Connection test for '{}' could not be run: {e}", request.ds_name);
        e.to_string()
    });

    ConnectionTestReport {
        banner,
        element: banner.element_id(),
        error,
    }
}
