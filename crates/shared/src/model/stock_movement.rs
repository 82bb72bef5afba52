pub const MOVEMENT_ADD: &str = "add";
pub const MOVEMENT_REMOVE: &str = "remove";
