//! Error macros for adhoc-net

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::NetError::UsageError($msg.to_string()))
    };
}

/// Macro for returning a node-not-found error
#[macro_export]
macro_rules! bail_node_not_found {
    ($label:expr) => {
        return Err($crate::error::NetError::node_not_found($label))
    };
}
