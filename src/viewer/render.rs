use super::constants::{
    AGENT_LABEL_OFFSET, DEFAULT_LINE_WIDTH, GOAL_INNER_COLOR, HUD_FONT_SIZE, HULL_LINE_WIDTH,
    LIDAR_LINE_WIDTH, PLAYER_FONT_SIZE, PUCK_FILL_COLOR, PUCK_LINE_WIDTH, PUCK_STROKE_COLOR,
    RINK_COLOR, RINK_LINE_WIDTH, SCORE_SEPARATOR, WHEEL_COLOR,
};
use super::snapshot::{Board, ClosedPolygon, Player, Snapshot, WirePoint};
use super::surface::Surface;
use super::ViewerConfig;

/// Paints one snapshot onto the surface. Never fails: a snapshot without
/// players or board draws nothing at all (no clear either, so whatever frame
/// is already on the surface stays up).
pub fn render(surface: &mut impl Surface, config: &ViewerConfig, snapshot: &Snapshot) {
    let (Some(players), Some(board)) = (snapshot.players.as_ref(), snapshot.board.as_ref())
    else {
        return;
    };

    surface.clear();
    draw_board(surface, config, board);
    for player in players {
        draw_player(surface, config, player);
    }
    // HUD goes last so nothing occludes it.
    draw_hud(surface, config, snapshot);
}

/// World coordinate to surface coordinate, both axes alike.
pub fn map_coord(config: &ViewerConfig, value: f64) -> f64 {
    config.scale * value + config.offset
}

fn map_point(config: &ViewerConfig, point: WirePoint) -> [f64; 2] {
    [map_coord(config, point[0]), map_coord(config, point[1])]
}

/// Draws all N segments of a closed polygon, the last one connecting the
/// final point back to the first. Fewer than two points draws nothing.
pub fn draw_polygon(
    surface: &mut impl Surface,
    config: &ViewerConfig,
    polygon: &ClosedPolygon,
    color: &str,
    width: f64,
) {
    let points = polygon.points();
    if points.len() < 2 {
        return;
    }
    for index in 0..points.len() {
        let next = (index + 1) % points.len();
        surface.line(
            map_point(config, points[index]),
            map_point(config, points[next]),
            color,
            width,
        );
    }
}

fn draw_board(surface: &mut impl Surface, config: &ViewerConfig, board: &Board) {
    draw_polygon(surface, config, &board.rink.outline(), RINK_COLOR, RINK_LINE_WIDTH);

    // Goal index doubles as the team index.
    for (index, goal) in board.goals.iter().enumerate() {
        if let Some(color) = config.team_colors.get(index) {
            draw_polygon(surface, config, &goal.outer(), color, DEFAULT_LINE_WIDTH);
        }
        draw_polygon(surface, config, &goal.inner(), GOAL_INNER_COLOR, DEFAULT_LINE_WIDTH);
    }

    surface.fill_circle(
        map_point(config, board.puck.position),
        config.scale * board.puck.radius,
        PUCK_FILL_COLOR,
        PUCK_STROKE_COLOR,
        PUCK_LINE_WIDTH,
    );
}

fn draw_player(surface: &mut impl Surface, config: &ViewerConfig, player: &Player) {
    let team_color = usize::try_from(player.team - 1)
        .ok()
        .and_then(|index| config.team_colors.get(index));

    if let Some(color) = team_color {
        for sub_path in player.hull.sub_paths() {
            draw_polygon(surface, config, &sub_path, color, HULL_LINE_WIDTH);
        }
    }

    for wheel in &player.wheels {
        draw_polygon(surface, config, &wheel.outline(), WHEEL_COLOR, DEFAULT_LINE_WIDTH);
    }

    for (segment, category) in player.lidar_points.iter().zip(&player.lidar_categories) {
        // Category codes outside the palette fail closed: the ray is skipped.
        let color = usize::try_from(*category)
            .ok()
            .and_then(|index| config.lidar_colors.get(index));
        if let Some(color) = color {
            surface.line(
                map_point(config, segment[0]),
                map_point(config, segment[1]),
                color,
                LIDAR_LINE_WIDTH,
            );
        }
    }

    let label_position = map_point(config, player.hull.position);
    surface.text(label_position, &player.team.to_string(), PLAYER_FONT_SIZE);
    surface.text(
        [label_position[0], label_position[1] + AGENT_LABEL_OFFSET],
        &player.numagent.to_string(),
        PLAYER_FONT_SIZE,
    );
}

fn draw_hud(surface: &mut impl Surface, config: &ViewerConfig, snapshot: &Snapshot) {
    let score = snapshot
        .score
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(SCORE_SEPARATOR);

    surface.text([config.label_column, 50.0], "Time Remaining:", HUD_FONT_SIZE);
    surface.text(
        [config.value_column, 50.0],
        &format!("{:.3}", snapshot.timestep),
        HUD_FONT_SIZE,
    );
    surface.text([config.label_column, 100.0], "Score:", HUD_FONT_SIZE);
    surface.text([config.value_column, 100.0], &score, HUD_FONT_SIZE);
    surface.text([config.label_column, 150.0], "Just Scored:", HUD_FONT_SIZE);
    surface.text(
        [config.value_column, 150.0],
        if snapshot.scored { "true" } else { "false" },
        HUD_FONT_SIZE,
    );
}
