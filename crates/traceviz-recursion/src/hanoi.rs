use traceviz_step::recursion::{CallParams, HanoiState, RecursionStep, RecursionStepKind};

fn tower_name(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Classic three-peg Tower of Hanoi. The trace opens with a setup step
/// showing all `n` disks on peg A, then emits a `call` step before each
/// recursive sub-call and a `calculation` (or base-case `return`) step for
/// every disk move. The final step's move count reaches `2^n - 1`.
pub fn hanoi_trace(n: u32) -> Vec<RecursionStep> {
    let mut steps = Vec::new();
    let mut towers: [Vec<u32>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for disk in (1..=n).rev() {
        towers[0].push(disk);
    }
    let mut move_count = 0;

    steps.push(RecursionStep {
        hanoi_state: Some(HanoiState::observe(&towers, move_count)),
        ..RecursionStep::new(
            RecursionStepKind::Call,
            "hanoi",
            CallParams::Hanoi { disks: n, from: 0, to: 2, aux: 1 },
            0,
            format!("Initial setup: Move {n} disks from Tower A to Tower C using Tower B"),
        )
    });

    if n > 0 {
        hanoi_helper(n, 0, 2, 1, 0, &mut towers, &mut move_count, &mut steps);
    }
    steps
}

#[allow(clippy::too_many_arguments)]
fn hanoi_helper(
    disks: u32,
    from: usize,
    to: usize,
    aux: usize,
    depth: usize,
    towers: &mut [Vec<u32>; 3],
    move_count: &mut u64,
    steps: &mut Vec<RecursionStep>,
) {
    if disks == 1 {
        if let Some(disk) = towers[from].pop() {
            towers[to].push(disk);
            *move_count += 1;

            steps.push(RecursionStep {
                hanoi_state: Some(HanoiState::moved(towers, from, to, disk, *move_count)),
                ..RecursionStep::new(
                    RecursionStepKind::Return,
                    "hanoi",
                    CallParams::Hanoi { disks, from, to, aux },
                    depth,
                    format!(
                        "Base case: Move disk {disk} from Tower {} to Tower {}",
                        tower_name(from),
                        tower_name(to)
                    ),
                )
            });
        }
        return;
    }

    steps.push(RecursionStep {
        hanoi_state: Some(HanoiState::observe(towers, *move_count)),
        ..RecursionStep::new(
            RecursionStepKind::Call,
            "hanoi",
            CallParams::Hanoi { disks: disks - 1, from, to: aux, aux: to },
            depth + 1,
            format!(
                "Step 1: Move {} disks from Tower {} to Tower {}",
                disks - 1,
                tower_name(from),
                tower_name(aux)
            ),
        )
    });

    hanoi_helper(disks - 1, from, aux, to, depth + 1, towers, move_count, steps);

    if let Some(disk) = towers[from].pop() {
        towers[to].push(disk);
        *move_count += 1;

        steps.push(RecursionStep {
            hanoi_state: Some(HanoiState::moved(towers, from, to, disk, *move_count)),
            ..RecursionStep::new(
                RecursionStepKind::Calculation,
                "hanoi",
                CallParams::Hanoi { disks, from, to, aux },
                depth,
                format!(
                    "Step 2: Move disk {disk} from Tower {} to Tower {}",
                    tower_name(from),
                    tower_name(to)
                ),
            )
        });
    }

    steps.push(RecursionStep {
        hanoi_state: Some(HanoiState::observe(towers, *move_count)),
        ..RecursionStep::new(
            RecursionStepKind::Call,
            "hanoi",
            CallParams::Hanoi { disks: disks - 1, from: aux, to, aux: from },
            depth + 1,
            format!(
                "Step 3: Move {} disks from Tower {} to Tower {}",
                disks - 1,
                tower_name(aux),
                tower_name(to)
            ),
        )
    });

    hanoi_helper(disks - 1, aux, to, from, depth + 1, towers, move_count, steps);
}
