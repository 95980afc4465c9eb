pub const ANALYSIS: &str = include_str!("../data/prompts/analysis.txt");
