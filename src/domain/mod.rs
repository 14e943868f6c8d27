// Domain layer - Plain data owned by the running view
pub mod chart;
pub mod view;
pub mod vote;
pub mod zone;
