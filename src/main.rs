fn main() {
    dungeon_knight::game::run();
}
