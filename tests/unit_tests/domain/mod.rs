mod prompt_test;
