mod helpers;

mod account_test;
mod address_test;
mod member_test;
mod section_test;
mod uow_test;
