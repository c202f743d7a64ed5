use super::*;

#[component]
/// Catch-all route body with a single path back home.
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Surface variant=SurfaceVariant::Muted layout_class="not-found-page" ui_slot="not-found">
            <Stack gap=LayoutGap::Md align=LayoutAlign::Center padding=LayoutPadding::Lg>
                <Heading role=TextRole::Title>"404"</Heading>
                <Text tone=TextTone::Secondary>"This page does not exist."</Text>
                <LinkButton href="/".to_string() variant=ButtonVariant::Primary>
                    "Back to Home"
                </LinkButton>
            </Stack>
        </Surface>
    }
}
