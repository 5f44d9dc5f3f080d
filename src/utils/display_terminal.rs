//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정(저장소 선택, 서비스 구성, 요청 게이트 설정)을
//! 박스 제목과 단계 표시로 출력합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              🔄 BUILDING SERVICES                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: Selecting user storage`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: User storage ready (1 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 하위 작업 상태
///
/// ```text
///    ├─ UserRepository: MongoDB
///    ├─ TokenService: HS256, access 3600s
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서비스 구성 완료 요약
pub fn print_final_summary(storage: &str, services: usize, public_paths: usize) {
    println!();
    print_boxed_title("🎉 ACCOUNT SERVICE READY");
    println!("   📦 Storage: {}", storage);
    println!("   🔧 Services: {}", services);
    println!("   🔓 Public paths: {}", public_paths);
    println!();
}
