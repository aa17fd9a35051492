//! Error macros for airnet

/// Macro for returning an unknown airport error
#[macro_export]
macro_rules! bail_unknown_node {
    ($id:expr) => {
        return Err($crate::error::AirnetError::unknown_node($id))
    };
}
