mod accumulator_tests;
