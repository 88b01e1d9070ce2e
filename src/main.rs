use clap::Parser;
use groupbuy_common::demo::demo_products;
use groupbuy_common::{
    InMemoryRepository, ListingFilter, ListingViewModel, ProductRepository, per_person_price,
};
use groupbuy_rust::{cli, config, display, error, logging, store};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use store::JsonFileRepository;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(cli) {
        tracing::error!(error = ?e, "명령 실패");
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_path = config.resolve_data_path(cli.data.as_deref())?;

    match cli.command {
        Commands::List { sort, keyword, liked_only, max_distance, json, demo } => {
            let filter = ListingFilter {
                sort: sort.unwrap_or(config.default_sort),
                keyword,
                liked_only,
                max_distance_km: max_distance,
            };

            if demo {
                print_listing(InMemoryRepository::with_demo_data(), filter, json)?;
            } else {
                let repo = JsonFileRepository::open(&data_path)?;
                if repo.is_empty() {
                    println!("상품이 없습니다. `groupbuy init`으로 데모 데이터를 만들 수 있습니다");
                    return Ok(());
                }
                print_listing(repo, filter, json)?;
            }
        }

        Commands::Price { total, participants } => {
            let price = per_person_price(&total, &participants)?;
            println!("{}", price);
        }

        Commands::Like { id } => {
            let mut repo = JsonFileRepository::open(&data_path)?;
            let liked = repo.toggle_like(id)?;
            let name = repo.get(id)?.name;
            if liked {
                println!("♥ 찜했습니다: [{}] {}", id, name);
            } else {
                println!("♡ 찜을 취소했습니다: [{}] {}", id, name);
            }
        }

        Commands::Show { id } => {
            let repo = JsonFileRepository::open(&data_path)?;
            let product = repo.get(id)?;
            let participants = product.participants()?;

            println!("[{}] {}", product.id, product.name);
            println!("  총 가격: {}", product.price_total);
            println!("  1인당: {}", product.per_person_price()?);
            println!(
                "  참여: {} (남은 자리 {}){}",
                participants,
                participants.remaining(),
                if participants.is_full() { " 모집 완료" } else { "" }
            );
            println!("  거리: {:.1}km", product.distance_km);
            println!("  등록: {}", display::format_elapsed(product.created_at, chrono::Utc::now()));
            println!("  찜: {}", if repo.liked().contains(id) { "♥" } else { "♡" });
        }

        Commands::Init { force } => {
            let repo = JsonFileRepository::create(&data_path, demo_products(), force)?;
            println!("✔ 데모 상품 {}건을 저장했습니다: {}", repo.len(), repo.path().display());
        }

        Commands::Config { set_data_path, set_default_sort, show } => {
            let mut config = config;

            if let Some(path) = set_data_path {
                config.set_data_path(path)?;
                println!("✔ 데이터 파일 경로를 설정했습니다");
            }

            if let Some(mode) = set_default_sort {
                config.set_default_sort(mode)?;
                println!("✔ 기본 정렬 기준을 설정했습니다: {}", mode);
            }

            if show {
                println!("설정:");
                println!("  설정 파일: {}", Config::config_path()?.display());
                println!("  데이터 파일: {}", config.resolve_data_path(None)?.display());
                println!("  기본 정렬: {}", config.default_sort);
            }
        }
    }

    Ok(())
}

fn print_listing<R: ProductRepository>(repo: R, filter: ListingFilter, json: bool) -> Result<()> {
    let view = ListingViewModel::with_filter(repo, filter);
    let rows = view.rows()?;
    tracing::debug!(count = rows.len(), sort = %view.sort_mode(), "목록 생성");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("정렬: {} ({}건)\n", view.sort_mode(), rows.len());
    let now = chrono::Utc::now();
    for row in &rows {
        println!("{}", display::format_row(row, now));
    }

    Ok(())
}
