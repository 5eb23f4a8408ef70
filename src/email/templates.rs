pub fn render_confirmation(organization: &str, id: u64, needs: &str) -> String {
    format!(
        "Hello {organization},

We received your clarity review request (reference #{id}):

{needs}

We will reply to this address once the review is ready.

--
Semiconductor Export Clarity"
    )
}
