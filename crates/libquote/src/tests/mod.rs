mod call_tree_assembler_tests;
mod kind_registry_tests;
mod overload_resolver_tests;
mod render_tests;
mod token_quoter_tests;
