pub mod calibration;
pub mod home;
pub mod logs;
pub mod maintenance;
pub mod not_found;
pub mod rewards;
pub mod status;
pub mod throw;
