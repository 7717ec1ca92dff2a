use super::models::ActivityModel;

/// The Mergington High School catalog loaded at startup, in listing order
pub fn seed_activities() -> Vec<ActivityModel> {
    vec![
        ActivityModel::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ActivityModel::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ActivityModel::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        // Sports
        ActivityModel::new(
            "Soccer Team",
            "Join the school soccer team for practice and matches",
            "Wednesdays, 4:00 PM - 6:00 PM",
            18,
        )
        .with_participants(["alex@mergington.edu", "lucas@mergington.edu"]),
        ActivityModel::new(
            "Basketball Club",
            "Practice basketball skills and compete in games",
            "Mondays and Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ActivityModel::new(
            "Swimming Team",
            "Train and compete in swimming meets",
            "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["sarah@mergington.edu", "james@mergington.edu"]),
        // Academic
        ActivityModel::new(
            "Math Olympiad",
            "Prepare for math competitions and solve challenging problems",
            "Tuesdays, 4:00 PM - 5:30 PM",
            10,
        )
        .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        ActivityModel::new(
            "Science Club",
            "Explore scientific concepts and conduct experiments",
            "Fridays, 2:30 PM - 4:00 PM",
            16,
        )
        .with_participants(["ella@mergington.edu", "jack@mergington.edu"]),
        ActivityModel::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Mondays, 4:00 PM - 5:30 PM",
            14,
        )
        .with_participants(["nathan@mergington.edu", "zoe@mergington.edu"]),
        // Arts
        ActivityModel::new(
            "Art Workshop",
            "Create paintings, drawings, and sculptures",
            "Thursdays, 3:30 PM - 5:00 PM",
            14,
        )
        .with_participants(["grace@mergington.edu", "henry@mergington.edu"]),
        ActivityModel::new(
            "Drama Club",
            "Act, direct, and produce school plays",
            "Wednesdays, 3:30 PM - 5:30 PM",
            20,
        )
        .with_participants(["chloe@mergington.edu", "ben@mergington.edu"]),
        ActivityModel::new(
            "Music Ensemble",
            "Perform in a group and learn various musical instruments",
            "Fridays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants(["lucy@mergington.edu", "sam@mergington.edu"]),
    ]
}
