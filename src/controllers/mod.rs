pub mod site_controller;
pub mod sizing_controller;
pub mod system_controller;
