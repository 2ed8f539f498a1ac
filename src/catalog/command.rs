pub mod add_book_cmd;
pub mod check_availability_cmd;
pub mod count_books_cmd;
pub mod find_books_cmd;
pub mod generate_test_data_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;
