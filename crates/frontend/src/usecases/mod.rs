pub mod call;
pub mod quick_view;
