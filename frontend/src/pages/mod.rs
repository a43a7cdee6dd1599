pub mod connect_bank;
pub mod home;
pub mod review_money;
pub mod send_money;
