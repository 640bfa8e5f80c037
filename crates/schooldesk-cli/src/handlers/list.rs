use crate::cli::ListArgs;
use crate::output::output_success;
use anyhow::Context;
use schooldesk_core::{AppConfig, PageMeta, PageToken, Pager, Paginator};
use schooldesk_domain::{
    filter_records, parse_records, Class, CountryCode, Distinction, Division, EntityKind, Parent,
    Role, School, SearchQuery, Searchable, Student, Teacher,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Serialize)]
struct ListPage<'a, T: Serialize> {
    kind: EntityKind,
    items: &'a [T],
    pagination: PageMeta,
    pages: Vec<PageToken>,
    pager: String,
    summary: Option<String>,
}

pub fn handle(config: &AppConfig, args: ListArgs) -> anyhow::Result<()> {
    match args.kind {
        EntityKind::Roles => list_records::<Role>(config, &args),
        EntityKind::Students => list_records::<Student>(config, &args),
        EntityKind::Teachers => list_records::<Teacher>(config, &args),
        EntityKind::Parents => list_records::<Parent>(config, &args),
        EntityKind::Distinctions => list_records::<Distinction>(config, &args),
        EntityKind::CountryCodes => list_records::<CountryCode>(config, &args),
        EntityKind::Schools => list_records::<School>(config, &args),
        EntityKind::Classes => list_records::<Class>(config, &args),
        EntityKind::Divisions => list_records::<Division>(config, &args),
    }
}

fn list_records<T>(config: &AppConfig, args: &ListArgs) -> anyhow::Result<()>
where
    T: DeserializeOwned + Serialize + Searchable,
{
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let records: Vec<T> = parse_records(&content)
        .with_context(|| format!("Failed to load {} from {}", args.kind, args.file.display()))?;
    let loaded = records.len();

    let query = SearchQuery::new(args.search.as_str());
    let filtered = filter_records(records, &query);
    tracing::debug!(
        kind = %args.kind,
        loaded,
        matched = filtered.len(),
        search = query.raw(),
        "filtered records"
    );

    let per_page = args
        .per_page
        .unwrap_or_else(|| config.effective_items_per_page());
    if !config.is_allowed_page_size(per_page) {
        tracing::warn!(
            "Page size {} is not one of the configured options {:?}",
            per_page,
            config.effective_items_per_page_options()
        );
    }

    let mut paginator = Paginator::with_items_per_page(filtered, per_page);
    paginator.go_to_page(args.page);

    let pager = Pager::new(&paginator, &config.effective_items_per_page_options());
    let page = ListPage {
        kind: args.kind,
        items: paginator.current_items(),
        pagination: paginator.meta(),
        pager: pager.render_line(),
        summary: pager.is_visible().then(|| pager.summary()),
        pages: pager.tokens,
    };
    output_success(page)
}
