mod command_tests;
mod ui_loop_tests;
