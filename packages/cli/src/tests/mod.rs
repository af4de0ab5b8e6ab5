mod open_settings_tests;
