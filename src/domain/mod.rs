/// Domain layer - wallet registry logic with no platform dependencies.
pub mod registry;
pub mod wallet;
