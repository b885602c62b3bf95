//! Local tools the labs execute on behalf of the model.

mod restaurants;

pub use restaurants::RestaurantStats;
