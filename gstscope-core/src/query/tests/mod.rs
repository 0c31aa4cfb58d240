mod executor_tests;
mod page_tests;
