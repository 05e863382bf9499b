pub mod login_access_token;
