mod singleton_tests;
