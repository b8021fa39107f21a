pub(crate) mod endpoint_controller;
pub(crate) mod health_check_controller;
