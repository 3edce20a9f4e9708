use std::path::PathBuf;

use arcstr::ArcStr;
use pretty_assertions::assert_eq;
use route_chunks::{
  ModuleId, ModuleType, NormalizedRouteChunkOptions, RouteChunkAnalyzer, RouteChunkCache,
  RouteChunkExportFlags, RouteChunkExportName, RouteChunkInfo, RouteChunkName, SplitRouteModules,
  UnsplittableRouteExports, detect_route_chunks, detect_route_chunks_for_modules,
  detect_route_chunks_if_enabled, extract_chunk, get_route_chunk_code, get_route_chunk_if_enabled,
  is_chunkable, omit_chunks, route_chunk_validity, validate_route_chunks,
};

const INDEPENDENT_EXPORTS: &str = r#"
import { json } from "react-router";

export const clientAction = async () => json("action");
export const clientLoader = async () => json("loader");
export const clientMiddleware = [];
export function HydrateFallback() {
  return <p>Loading...</p>;
}
export default function Route() {
  return null;
}
"#;

const SHARED_HELPER: &str = r#"
const shared = () => "shared";

export const clientAction = async () => shared();
export const clientLoader = async () => shared();
export function HydrateFallback() {
  return null;
}
export default function Route() {
  return null;
}
"#;

fn options(split_route_modules: SplitRouteModules) -> NormalizedRouteChunkOptions {
  NormalizedRouteChunkOptions {
    split_route_modules,
    app_directory: PathBuf::from("/app"),
    root_route_file: "root.tsx".to_string(),
  }
}

fn detect(code: &str) -> RouteChunkInfo {
  detect_route_chunks(None, "routes/home.tsx", code, ModuleType::Tsx).unwrap()
}

#[test]
fn independent_exports_are_all_chunkable() {
  let info = detect(INDEPENDENT_EXPORTS);
  assert!(info.has_route_chunks);
  assert_eq!(info.chunked_exports, RouteChunkExportName::ALL.to_vec());
}

#[test]
fn exports_sharing_code_are_not_chunkable() {
  let info = detect(SHARED_HELPER);
  assert_eq!(info.chunked_exports, vec![RouteChunkExportName::HydrateFallback]);
  assert!(!info.has_route_chunk_by_export_name[RouteChunkExportName::ClientAction]);
  assert!(!info.has_route_chunk_by_export_name[RouteChunkExportName::ClientLoader]);
}

#[test]
fn chunkable_exports_share_no_statements() {
  for code in [INDEPENDENT_EXPORTS, SHARED_HELPER] {
    let analyzer = RouteChunkAnalyzer::new(None, "routes/home.tsx", code, ModuleType::Tsx);
    let dependencies = analyzer.export_dependencies().unwrap();
    let chunkable =
      dependencies.iter().filter(|(name, _)| is_chunkable(&dependencies, name)).collect::<Vec<_>>();
    for (a, a_deps) in &chunkable {
      for (b, b_deps) in &chunkable {
        if a == b {
          continue;
        }
        let shared = a_deps
          .top_level_non_module_statements
          .iter()
          .any(|stmt_idx| b_deps.top_level_non_module_statements.contains(stmt_idx));
        assert!(!shared, "{a} and {b} share a statement");
      }
    }
  }
}

#[test]
fn analysis_is_deterministic() {
  assert_eq!(detect(SHARED_HELPER), detect(SHARED_HELPER));
  let extract = || extract_chunk(INDEPENDENT_EXPORTS, ModuleType::Tsx, "clientLoader").unwrap();
  assert_eq!(extract(), extract());
  let omit = || omit_chunks(INDEPENDENT_EXPORTS, ModuleType::Tsx, &["clientLoader"]).unwrap();
  assert_eq!(omit(), omit());
}

#[test]
fn chunks_only_hold_their_own_export() {
  let chunk = extract_chunk(INDEPENDENT_EXPORTS, ModuleType::Tsx, "clientAction").unwrap().unwrap();
  assert!(chunk.contains("export const clientAction"));
  assert!(chunk.contains("import { json } from"));
  for other in ["clientLoader", "clientMiddleware", "HydrateFallback", "Route"] {
    assert!(!chunk.contains(other), "{other} leaked into {chunk}");
  }

  let fallback =
    extract_chunk(INDEPENDENT_EXPORTS, ModuleType::Tsx, "HydrateFallback").unwrap().unwrap();
  assert!(fallback.contains("export function HydrateFallback"));
  assert!(!fallback.contains("json"));
}

#[test]
fn unchunkable_exports_have_no_chunk() {
  assert_eq!(extract_chunk(SHARED_HELPER, ModuleType::Tsx, "clientAction").unwrap(), None);
  assert_eq!(extract_chunk(SHARED_HELPER, ModuleType::Tsx, "clientMiddleware").unwrap(), None);
}

#[test]
fn main_chunk_omits_every_chunkable_export() {
  let main = get_route_chunk_code(
    None,
    "routes/home.tsx",
    INDEPENDENT_EXPORTS,
    ModuleType::Tsx,
    RouteChunkName::Main,
  )
  .unwrap()
  .unwrap();
  assert!(main.contains("export default function Route"));
  for omitted in ["clientAction", "clientLoader", "clientMiddleware", "HydrateFallback", "json"] {
    assert!(!main.contains(omitted), "{omitted} left in {main}");
  }
}

#[test]
fn omitting_keeps_unchunkable_and_unrequested_exports() {
  let code = omit_chunks(SHARED_HELPER, ModuleType::Tsx, &["clientAction", "HydrateFallback"])
    .unwrap()
    .unwrap();
  assert!(code.contains("const shared"));
  assert!(code.contains("export const clientAction"));
  assert!(code.contains("export const clientLoader"));
  assert!(code.contains("export default function Route"));
  assert!(!code.contains("HydrateFallback"));

  let code = omit_chunks(INDEPENDENT_EXPORTS, ModuleType::Tsx, &["clientAction"]).unwrap().unwrap();
  assert!(!code.contains("clientAction"));
  for kept in ["clientLoader", "clientMiddleware", "HydrateFallback", "import { json } from"] {
    assert!(code.contains(kept), "{kept} missing from {code}");
  }
}

#[test]
fn cache_returns_shared_results_until_the_source_changes() {
  let cache = RouteChunkCache::new();
  let chunk = |code: &str| {
    get_route_chunk_code(
      Some(&cache),
      "routes/home.tsx",
      code,
      ModuleType::Tsx,
      RouteChunkName::Export(RouteChunkExportName::ClientLoader),
    )
    .unwrap()
    .unwrap()
  };

  let first = chunk(INDEPENDENT_EXPORTS);
  let second = chunk(INDEPENDENT_EXPORTS);
  assert!(ArcStr::ptr_eq(&first, &second));
  assert!(!cache.is_empty());

  let changed = INDEPENDENT_EXPORTS.replace("json(\"loader\")", "json(\"changed\")");
  let third = chunk(&changed);
  assert!(!ArcStr::ptr_eq(&first, &third));
  assert!(third.contains("changed"));
}

#[test]
fn cache_does_not_change_results() {
  let cache = RouteChunkCache::new();
  let cached = detect_route_chunks(Some(&cache), "routes/home.tsx", SHARED_HELPER, ModuleType::Tsx);
  assert_eq!(cached.unwrap(), detect(SHARED_HELPER));
}

#[test]
fn parse_errors_are_reported() {
  let result = detect_route_chunks(None, "routes/bad.tsx", "export const = ;", ModuleType::Tsx);
  assert!(result.is_err());
}

#[test]
fn disabled_splitting_does_nothing() {
  let options = options(SplitRouteModules::Off);
  let id = ModuleId::new("/app/routes/home.tsx");
  let info = detect_route_chunks_if_enabled(None, &options, &id, INDEPENDENT_EXPORTS).unwrap();
  assert_eq!(info, RouteChunkInfo::default());

  let chunk =
    get_route_chunk_if_enabled(None, &options, &id, RouteChunkName::Main, INDEPENDENT_EXPORTS);
  assert_eq!(chunk.unwrap(), None);
}

#[test]
fn root_route_module_is_exempt() {
  let options = options(SplitRouteModules::Enforce);
  let id = ModuleId::new("/app/root.tsx");
  let info = detect_route_chunks_if_enabled(None, &options, &id, SHARED_HELPER).unwrap();
  assert!(!info.has_route_chunks);

  let valid = RouteChunkExportFlags::from_fn(|_| false);
  assert!(validate_route_chunks(&options, &id, valid).is_ok());
}

#[test]
fn modules_without_route_exports_are_not_parsed() {
  let cache = RouteChunkCache::new();
  let options = options(SplitRouteModules::On);
  let id = ModuleId::new("/app/routes/about.tsx");
  let code = "export default function About() { return null; }";
  let info = detect_route_chunks_if_enabled(Some(&cache), &options, &id, code).unwrap();
  assert_eq!(info, RouteChunkInfo::default());
  assert!(cache.is_empty());
}

#[test]
fn enforce_reports_every_unsplittable_export() {
  let options = options(SplitRouteModules::Enforce);
  let id = ModuleId::new("/app/routes/home.tsx?route-chunk=main");
  let info = detect_route_chunks_if_enabled(None, &options, &id, SHARED_HELPER).unwrap();
  let valid = route_chunk_validity(None, &options, &id, SHARED_HELPER, &info).unwrap();
  assert!(!valid[RouteChunkExportName::ClientAction]);
  assert!(!valid[RouteChunkExportName::ClientLoader]);
  assert!(valid[RouteChunkExportName::ClientMiddleware]);
  assert!(valid[RouteChunkExportName::HydrateFallback]);

  let error = validate_route_chunks(&options, &id, valid).unwrap_err();
  assert_eq!(
    error.downcast_ref::<UnsplittableRouteExports>(),
    Some(&UnsplittableRouteExports {
      module: "routes/home.tsx".to_string(),
      export_names: vec!["clientAction".to_string(), "clientLoader".to_string()],
    })
  );
  let message = error.to_string();
  assert!(message.contains("- clientAction\n- clientLoader\n"));
  assert!(!message.contains("clientMiddleware"));
  assert!(!message.contains("HydrateFallback"));
}

#[test]
fn splittable_modules_pass_validation() {
  let options = options(SplitRouteModules::Enforce);
  let id = ModuleId::new("/app/routes/home.tsx");
  let info = detect_route_chunks_if_enabled(None, &options, &id, INDEPENDENT_EXPORTS).unwrap();
  let valid = route_chunk_validity(None, &options, &id, INDEPENDENT_EXPORTS, &info).unwrap();
  assert!(validate_route_chunks(&options, &id, valid).is_ok());
}

#[test]
fn parallel_detection_matches_sequential() {
  let cache = RouteChunkCache::new();
  let options = options(SplitRouteModules::On);
  let modules = (0..8)
    .map(|idx| {
      let code = if idx % 2 == 0 { INDEPENDENT_EXPORTS } else { SHARED_HELPER };
      (ModuleId::new(format!("/app/routes/route-{idx}.tsx")), code.to_string())
    })
    .collect::<Vec<_>>();

  let results = detect_route_chunks_for_modules(Some(&cache), &options, &modules);
  assert_eq!(results.len(), modules.len());
  for ((id, code), result) in modules.iter().zip(results) {
    let expected = detect_route_chunks_if_enabled(None, &options, id, code).unwrap();
    assert_eq!(result.unwrap(), expected);
  }
}
