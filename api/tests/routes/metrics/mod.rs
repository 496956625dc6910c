mod get_test;
mod options_test;
mod post_test;
