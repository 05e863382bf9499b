pub const CHAT_ASSISTANT_SYSTEM_PROMPT: &str = "You are DongoPet, a friendly pet-care assistant. \
Answer questions about feeding, health, training, grooming and everyday care of dogs, cats and other \
household pets. Keep answers short and practical. When symptoms sound serious, advise the owner to \
contact a veterinarian. Do not invent medication doses.";

/// System instruction grounding the answer on retrieved passages.
pub fn rag_system_prompt(context_prefix: &str, retrieved_context: &str) -> String {
    format!(
        "You are DongoPet, a pet-care assistant that answers from the provided context.\n\
         {context_prefix}\n\n\
         Use the following retrieved information to answer the question:\n\
         {retrieved_context}\n\n\
         Answer in one or two sentences unless the user asks for detail. \
         If the context does not cover the question, say so briefly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rag_prompt_embeds_prefix_and_context() {
        let prompt = rag_system_prompt("Owner has a senior beagle.", "Beagles gain weight easily.");

        assert!(prompt.contains("Owner has a senior beagle."));
        assert!(prompt.contains("Beagles gain weight easily."));
    }
}
