//! Prompt Templates
//!
//! Fixed instruction templates for each pipeline capability. Each stage
//! renders exactly one of these per invocation; variables are interpolated
//! inline, never read from ambient state.

/// Per-chunk summarization instruction. Summaries surface the
/// philosophical content that later stages cite, not narrative detail.
pub fn chunk_summary(chunk: &str) -> String {
    format!(
        "You are an expert at summarizing philosophical texts.\n\n\
         Summarize the following text chunk, focusing on the key philosophical \
         concepts, arguments, and positions it contains:\n\n\
         {chunk}\n\n\
         Provide a concise summary:"
    )
}

/// Research synthesis instruction combining document evidence and web findings.
///
/// Document analysis is labelled primary evidence and web results
/// supplementary, so the model weighs caller-supplied sources first.
pub fn research(query: &str, document_context: &str, web_findings: &str) -> String {
    let mut prompt = String::new();

    if !document_context.is_empty() {
        prompt.push_str(&format!(
            "Based on the following document analysis:\n{document_context}\n\n"
        ));
    }

    if !web_findings.is_empty() {
        prompt.push_str(&format!(
            "And the following web research findings:\n{web_findings}\n\n"
        ));
    }

    prompt.push_str(&format!(
        "Please {query}\n\n\
         Important: Use the document analysis as your primary source, \
         supplemented by the web research. Produce a cohesive research \
         narrative with attributions to the sources above."
    ));

    prompt
}

/// Outline drafting instruction.
pub fn outline(topic: &str, research_summary: &str) -> String {
    format!(
        "You are an expert drafting assistant for philosophy papers. \
         Given the topic '{topic}' and the following research summary:\n\n\
         {research_summary}\n\n\
         Create a detailed and structured outline. The outline should include \
         sections such as Introduction, Background, Main Argument, \
         Counterarguments, and Conclusion. Include notes on key philosophical \
         arguments and citations where relevant."
    )
}

/// Full-draft writing instruction.
pub fn paper(outline: &str, research_summary: &str) -> String {
    format!(
        "You are a writer specialized in crafting philosophy papers.\n\n\
         Using the outline below:\n{outline}\n\n\
         And the following research summary:\n{research_summary}\n\n\
         Write a comprehensive draft of a philosophy paper. Ensure the writing \
         is scholarly, uses proper citations, and addresses every part of the \
         prompt, including relevant citations."
    )
}
