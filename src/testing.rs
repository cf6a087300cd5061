pub mod case_contract;
