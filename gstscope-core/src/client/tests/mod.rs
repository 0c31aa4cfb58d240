mod poll_tests;
