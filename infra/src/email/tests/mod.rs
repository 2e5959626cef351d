mod code_delivery_tests;
