pub mod accounts;
pub mod db;
pub mod uow;

/// Run a query body against the manager's open transaction when one is
/// active, else against the pooled connection. The body is expanded per
/// arm, so it stays generic over the connection type.
macro_rules! on_conn {
    ($mgr:expr, $conn:ident => $body:expr) => {
        match $mgr.active_txn() {
            Some($conn) => $body,
            None => {
                let $conn = $mgr.connection();
                $body
            }
        }
    };
}

pub(crate) use on_conn;
