use unicode_segmentation::UnicodeSegmentation;

pub const MAX_SEARCH_TERMS: usize = 32;

/// Splits a search term into lowercase word tokens, deduplicated in first-seen order.
pub fn search_terms(raw: &str) -> Vec<String> {
	let mut terms: Vec<String> = Vec::new();

	for word in raw.unicode_words() {
		let word = word.to_lowercase();

		if terms.contains(&word) {
			continue;
		}

		terms.push(word);

		if terms.len() == MAX_SEARCH_TERMS {
			break;
		}
	}

	terms
}

/// True when any term equals a word of the title or the content, ignoring case.
pub fn matches_any(terms: &[String], title: &str, content: Option<&str>) -> bool {
	let fields = [Some(title), content];

	fields.into_iter().flatten().any(|text| {
		text.unicode_words().any(|word| {
			let word = word.to_lowercase();

			terms.iter().any(|term| term == &word)
		})
	})
}
