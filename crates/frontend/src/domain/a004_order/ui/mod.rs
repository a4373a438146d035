pub mod checkout_page;
