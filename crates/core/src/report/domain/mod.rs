pub mod call_report;
pub mod report_assembler;
