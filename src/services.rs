pub mod claude_service;
pub mod content_service;
pub mod gumroad_service;
pub mod prompts;
pub mod sales_aggregator;
pub mod sales_service;
