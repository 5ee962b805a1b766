//! Display functions for command results

use super::formatters::{columns, create_progress_bar, format_bytes, hooked_word};
use crate::commands::{
    AlphagramGroup, AnagramResult, CheckResult, CompileResult, DefineResult, HookResult,
    LexiconInfo, SearchResult,
};
use colored::Colorize;

const LINE_WIDTH: usize = 72;

fn header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn print_words<S: AsRef<str>>(words: &[S]) {
    for row in columns(words, LINE_WIDTH) {
        println!("   {row}");
    }
}

/// Print the verdict on a play
pub fn print_check_result(result: &CheckResult) {
    for verdict in &result.verdicts {
        if verdict.acceptable {
            println!("{} {}", "✔".green(), verdict.word.green().bold());
        } else {
            println!("{} {}", "✘".red(), verdict.word.red().bold());
        }
    }

    let lexicon = if result.lexicon.is_empty() {
        String::new()
    } else {
        format!(" in {}", result.lexicon)
    };
    if result.all_acceptable() {
        println!("{}", format!("Play is ACCEPTABLE{lexicon}").green().bold());
    } else {
        println!("{}", format!("Play is UNACCEPTABLE{lexicon}").red().bold());
    }
}

/// Print search matches
pub fn print_search_result(result: &SearchResult) {
    let conditions: Vec<String> = result.spec.conditions.iter().map(ToString::to_string).collect();
    header("SEARCH:", &conditions.join(if result.spec.conjunction { " AND " } else { " OR " }));

    if result.words.is_empty() {
        println!("\n   {}", "No matches".yellow());
    } else {
        println!();
        print_words(&result.words);
    }

    println!();
    if result.words.len() < result.total {
        println!(
            "   Showing {} of {} matches",
            result.words.len().to_string().bright_yellow(),
            result.total.to_string().bright_yellow().bold()
        );
    } else {
        println!("   {} matches", result.total.to_string().bright_yellow().bold());
    }
    println!("   Time taken: {:.3}s", result.duration.as_secs_f64());
}

/// Print a word with its hooks
pub fn print_hook_result(result: &HookResult) {
    let line = hooked_word(&result.front, &result.word, &result.back);
    if result.acceptable {
        println!("{}", line.green());
    } else {
        println!("{} {}", line.red(), "(not acceptable)".bright_black());
    }
    if result.num_anagrams > 1 {
        println!(
            "   {} anagrams share its letters",
            result.num_anagrams.to_string().bright_yellow()
        );
    }
}

/// Print a definition lookup
pub fn print_define_result(result: &DefineResult) {
    let word = if result.acceptable {
        result.word.green().bold()
    } else {
        result.word.red().bold()
    };
    match &result.definition {
        Some(definition) => println!("{word}: {definition}"),
        None => println!("{word}: {}", "no definition".bright_black()),
    }
}

/// Print the words formed from a rack
pub fn print_anagram_result(result: &AnagramResult) {
    let title = if result.subanagrams {
        "SUBANAGRAMS:"
    } else {
        "ANAGRAMS:"
    };
    header(title, &result.rack);
    println!();
    if result.words.is_empty() {
        println!("   {}", "No words".yellow());
    } else {
        print_words(&result.words);
    }
    println!("\n   {} words", result.words.len().to_string().bright_yellow().bold());
}

/// Print alphagram groups
pub fn print_alphagram_groups(groups: &[AlphagramGroup]) {
    for group in groups {
        let words = if group.words.is_empty() {
            "-".bright_black().to_string()
        } else {
            group.words.join(" ")
        };
        println!("{:<10} {words}", group.alphagram.bright_yellow().bold());
    }
}

/// Print what is loaded
pub fn print_lexicon_info(info: &LexiconInfo) {
    let name = if info.lexicon.is_empty() {
        "(unnamed)"
    } else {
        info.lexicon.as_str()
    };
    header("LEXICON:", name);

    println!("\n📊 {}", "Contents:".bright_cyan().bold());
    println!("   Words:            {}", info.words.to_string().bright_yellow().bold());
    println!("   Graph edges:      {} forward, {} reverse", info.forward_edges, info.reverse_edges);
    println!("   Defined words:    {}", info.defined_words);
    for (length, count) in &info.stems {
        println!("   {length}-letter stems:  {count}");
    }

    let max = info.length_histogram.iter().copied().max().unwrap_or(0);
    if max > 0 {
        println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
        for (length, &count) in info.length_histogram.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar = create_progress_bar(count as f64, max as f64, 40);
            println!("   {length:2}: {} {count:7}", bar.green());
        }
    }
}

/// Print compiled file sizes
pub fn print_compile_result(result: &CompileResult) {
    header("COMPILED:", &format!("{} words", result.words));
    println!();
    for file in &result.files {
        let kind = if file.reverse { "reverse" } else { "forward" };
        println!(
            "   {kind:7} {} ({})",
            file.path.display().to_string().bright_yellow(),
            format_bytes(file.bytes)
        );
    }
    println!("   Time taken: {:.2}s", result.duration.as_secs_f64());
}
