pub mod delete_user;
pub mod delete_user_me;
pub mod get_user;
pub mod get_user_me;
pub mod get_users;
pub mod register_user;
pub mod update_user;
pub mod update_user_me;
