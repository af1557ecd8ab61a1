mod script_lexer_tests;
mod script_parser_tests;
mod script_whitespace_normalizer_tests;
