//! The built-in exercise and routine library.
//!
//! Content is authored in code, not loaded from disk; see
//! [`Catalog::builtin`](super::Catalog::builtin).

use super::{Catalog, Category, Exercise, Routine, RoutineStep};

pub(super) fn builtin() -> Catalog {
    Catalog {
        exercises: exercises(),
        routines: routines(),
    }
}

fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "chin-tucks".into(),
            name: "Chin Tucks".into(),
            subtitle: Some("The Double Chin".into()),
            category: Category::Neck,
            description: "Realignment for forward head posture.".into(),
            why: "This is the #1 corrective exercise for forward head posture. It works instantly to realign the vertebrae.".into(),
            steps: vec![
                "Sit tall. Look straight ahead.".into(),
                "Without tilting your head up or down, slide your chin backward as if you are trying to make a \"double chin.\"".into(),
                "Visualize the back of your neck getting longer.".into(),
                "Hold for 2 seconds, then release.".into(),
                "Repeat 10 times.".into(),
            ],
            reps: Some("10 reps".into()),
            duration: Some("30 sec".into()),
            image_prompt: Some("A person sitting tall in a chair, performing a chin tuck exercise to correct forward head posture, clean minimalist illustration style, soft lighting.".into()),
        },
        Exercise {
            id: "yes-no".into(),
            name: "Yes & No".into(),
            subtitle: Some("SCM Release".into()),
            category: Category::Neck,
            description: "Releases the Sternocleidomastoid muscles.".into(),
            why: "The SCM muscles get short and tight when you look down. This causes headaches behind the eyes.".into(),
            steps: vec![
                "Keep your chin level.".into(),
                "Inhale and turn your head slowly to look over your right shoulder (saying \"No\").".into(),
                "Exhale and return to center. Repeat on the left.".into(),
                "Then, look all the way up to the ceiling (stretching the throat) and down to the chest (saying \"Yes\").".into(),
            ],
            reps: Some("5 per side".into()),
            duration: Some("30 sec".into()),
            image_prompt: Some("A minimalist illustration of a person rotating their head side to side and up and down for neck mobility, serene atmosphere.".into()),
        },
        Exercise {
            id: "cactus".into(),
            name: "The Cactus".into(),
            subtitle: Some("Chest Opener".into()),
            category: Category::Neck,
            description: "Opens the chest to allow the neck to realign.".into(),
            why: "You cannot fix the neck if the chest is tight. We need to open the \"Gateway.\"".into(),
            steps: vec![
                "Sit on the edge of your chair.".into(),
                "Raise your arms out to the sides, bending elbows at 90 degrees.".into(),
                "Inhale: Squeeze your shoulder blades together behind you and puff your chest forward. Look up slightly.".into(),
                "Exhale: Round your spine forward and bring your forearms to touch in front of your face.".into(),
                "Repeat 5 times.".into(),
            ],
            reps: Some("5 slow rounds".into()),
            duration: Some("60 sec".into()),
            image_prompt: Some("A person sitting in a chair with arms in a cactus position, opening their chest and squeezing shoulder blades, minimalist art style.".into()),
        },
        Exercise {
            id: "eagle-arms".into(),
            name: "Eagle Arms".into(),
            subtitle: Some("Upper Back Floss".into()),
            category: Category::Neck,
            description: "Stretches the upper back and shoulder blades.".into(),
            why: "Targets the rhomboids, the area between the shoulder blades where digital nomads carry tension.".into(),
            steps: vec![
                "Stretch arms forward. Cross your Right arm under your Left.".into(),
                "Bend elbows and try to wrap forearms so palms touch (or just hug your opposite shoulders).".into(),
                "Lift your elbows up to shoulder height.".into(),
                "Push your forearms away from your face.".into(),
                "Breathe into the space between your shoulder blades for 5 breaths. Switch sides.".into(),
            ],
            reps: None,
            duration: Some("1 min".into()),
            image_prompt: Some("A person with arms wrapped in eagle pose (Garudasana arms) to stretch the upper back, clean minimalist illustration.".into()),
        },
        Exercise {
            id: "figure-4".into(),
            name: "Figure-4".into(),
            subtitle: Some("The Sciatica Saver".into()),
            category: Category::Back,
            description: "Deep stretch for hips and glutes.".into(),
            why: "Targets the Piriformis and outer hips. Antidote for shooting leg pain or dull glute aches.".into(),
            steps: vec![
                "Sit on the edge of your chair. Both feet flat on the floor.".into(),
                "Cross your Right Ankle over your Left Knee.".into(),
                "Flex your right foot (pull toes back toward the shin).".into(),
                "Inhale: Sit tall.".into(),
                "Exhale: Hinge forward from your hips (keep your spine straight).".into(),
                "Hold for 5-10 breaths. Switch sides.".into(),
            ],
            reps: None,
            duration: Some("2 min".into()),
            image_prompt: Some("A person sitting in a chair performing a figure-four hip stretch, crossing one ankle over the opposite knee, minimalist style.".into()),
        },
        Exercise {
            id: "seated-twist".into(),
            name: "Seated Twist".into(),
            subtitle: Some("The Wring-Out".into()),
            category: Category::Back,
            description: "Hydrates spinal discs and improves circulation.".into(),
            why: "Twisting hydrates the spinal discs. Think of a dirty sponge: to clean it, you have to wring it out.".into(),
            steps: vec![
                "Sit sideways on your chair so the backrest is to your right.".into(),
                "Inhale and lengthen your spine upward.".into(),
                "Exhale and twist to the right, holding the back of the chair.".into(),
                "Use chair leverage to gently deepen the twist. Look over your right shoulder.".into(),
                "Hold for 5 breaths. Switch sides.".into(),
            ],
            reps: None,
            duration: Some("1 min".into()),
            image_prompt: Some("A person sitting sideways on a chair, twisting their torso to hold the backrest, minimalist illustration.".into()),
        },
        Exercise {
            id: "zombie".into(),
            name: "The Zombie".into(),
            subtitle: Some("Wrist Flossing".into()),
            category: Category::WristsEyes,
            description: "Prevents Carpal Tunnel issues.".into(),
            why: "Stretches wrist extensors and flexors. Opens the \"literal tunnel\" in your wrist.".into(),
            steps: vec![
                "Extend Right Arm straight out at shoulder height, palm facing floor.".into(),
                "Stop Sign: Pull fingers back toward face with left hand. Hold 10s.".into(),
                "Zombie Hand: Bend wrist down so fingers point to floor. Gently press on back of hand. Hold 10s.".into(),
                "Repeat on the Left Arm.".into(),
            ],
            reps: None,
            duration: Some("1 min".into()),
            image_prompt: Some("A close up of hands performing wrist stretches, one hand pulling fingers back, the other pressing hand down, minimalist art.".into()),
        },
        Exercise {
            id: "palming".into(),
            name: "Palming".into(),
            subtitle: Some("Total Darkness".into()),
            category: Category::WristsEyes,
            description: "Relieves digital eye strain.".into(),
            why: "Rests the optic nerve and soothes the nervous system. Breaks the \"near focus\" spasm.".into(),
            steps: vec![
                "Rub your palms together vigorously for 15 seconds until they feel hot.".into(),
                "Close your eyes.".into(),
                "Cup your warm palms over your eyes (do not press on eyeballs).".into(),
                "Breathe into the darkness for 60 seconds.".into(),
            ],
            reps: None,
            duration: Some("1 min".into()),
            image_prompt: Some("A person with their eyes closed, cupping their palms over their eyes for relaxation, serene and dark atmosphere, minimalist.".into()),
        },
        Exercise {
            id: "physio-sigh".into(),
            name: "Physiological Sigh".into(),
            subtitle: Some("60-Second Reset".into()),
            category: Category::Breath,
            description: "Immediate nervous system calming technique.".into(),
            why: "Fastest way to offload CO2 and lower stress in real-time. Manually reboots your operating system.".into(),
            steps: vec![
                "Inhale deeply through your nose.".into(),
                "Inhale again (a tiny sip of air on top) to fully inflate.".into(),
                "Exhale slowly and fully through your mouth (like a sigh).".into(),
                "Do this 3 times.".into(),
            ],
            reps: None,
            duration: Some("1 min".into()),
            image_prompt: Some("A peaceful person taking a deep breath, soft ethereal atmosphere, minimalist illustration of breathing.".into()),
        },
        Exercise {
            id: "box-breathing".into(),
            name: "Box Breathing".into(),
            subtitle: Some("The Tactical Calm".into()),
            category: Category::Breath,
            description: "Square breathing for focus and composure.".into(),
            why: "Used by Navy SEALs to maintain high performance under extreme stress. Balances the nervous system.".into(),
            steps: vec![
                "Inhale slowly for 4 seconds.".into(),
                "Hold your breath for 4 seconds.".into(),
                "Exhale slowly for 4 seconds.".into(),
                "Hold empty for 4 seconds.".into(),
                "Repeat for 4 rounds.".into(),
            ],
            reps: None,
            duration: Some("2 min".into()),
            image_prompt: Some("A geometric box shape integrated with a person breathing calmly, representing box breathing, minimalist and focused.".into()),
        },
        Exercise {
            id: "4-7-8-breath".into(),
            name: "4-7-8 Breath".into(),
            subtitle: Some("The Natural Tranquilizer".into()),
            category: Category::Breath,
            description: "Ancient pranayama technique for instant relaxation.".into(),
            why: "Acts as a natural nervous system sedative. Best for high-anxiety moments or sleep prep.".into(),
            steps: vec![
                "Exhale completely through your mouth with a whoosh sound.".into(),
                "Close your mouth and inhale quietly through your nose to a count of 4.".into(),
                "Hold your breath for a count of 7.".into(),
                "Exhale completely through your mouth to a count of 8.".into(),
                "Repeat for 4 cycles.".into(),
            ],
            reps: None,
            duration: Some("2 min".into()),
            image_prompt: Some("A person in a state of deep relaxation, preparing for sleep, soft moonlight colors, minimalist illustration.".into()),
        },
        Exercise {
            id: "belly-breathing".into(),
            name: "Belly Breathing".into(),
            subtitle: Some("The Diaphragm Drop".into()),
            category: Category::Breath,
            description: "Foundational grounding breath.".into(),
            why: "Switches off the \"chest breathing\" response triggered by screen-staring. Lowers cortisol.".into(),
            steps: vec![
                "Place one hand on your chest and the other on your belly.".into(),
                "Inhale slowly through your nose so your belly pushes your hand out.".into(),
                "The hand on your chest should remain as still as possible.".into(),
                "Exhale through pursed lips as if through a straw.".into(),
                "Continue for 10 slow breaths.".into(),
            ],
            reps: None,
            duration: Some("3 min".into()),
            image_prompt: Some("A person with one hand on their chest and one on their belly, demonstrating deep belly breathing, minimalist art.".into()),
        },
        Exercise {
            id: "bumble-bee".into(),
            name: "Bumble Bee Breath".into(),
            subtitle: Some("Vagus Nerve Stim".into()),
            category: Category::Breath,
            description: "Soothing sound-based meditation.".into(),
            why: "The humming vibration stimulates the Vagus Nerve, telling your brain you are safe and calm.".into(),
            steps: vec![
                "Sit comfortably. Close your eyes.".into(),
                "Place your index fingers on the cartilage of your ears.".into(),
                "Take a deep inhale through your nose.".into(),
                "As you exhale, make a loud humming sound like a bee.".into(),
                "Keep the hum going for the entire exhale. Repeat 5 times.".into(),
            ],
            reps: None,
            duration: Some("2 min".into()),
            image_prompt: Some("A person with fingers on their ears, humming peacefully, vibrant sound waves illustration, minimalist.".into()),
        },
    ]
}

fn routines() -> Vec<Routine> {
    vec![
        Routine {
            id: "morning-flow".into(),
            name: "Good Morning Flow".into(),
            description: "Wake up your body, hydrate your brain, and align your spine.".into(),
            total_time: "5 min".into(),
            image_prompt: Some("A bright morning scene with a person stretching, sunlight streaming in, minimalist and energetic illustration.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "physio-sigh".into(),
                    duration_override: None,
                    note: Some("Start with 3 sighs".into()),
                },
                RoutineStep {
                    exercise_id: "cactus".into(),
                    duration_override: Some("2 min".into()),
                    note: None,
                },
                RoutineStep {
                    exercise_id: "chin-tucks".into(),
                    duration_override: None,
                    note: None,
                },
            ],
        },
        Routine {
            id: "neck-fix".into(),
            name: "2-Minute Neck Fix".into(),
            description: "Remove 60lbs of pressure from your spine.".into(),
            total_time: "2 min".into(),
            image_prompt: Some("A focused illustration of a neck being realigned, soft blue and white colors, minimalist and clinical but warm.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "chin-tucks".into(),
                    duration_override: None,
                    note: None,
                },
                RoutineStep {
                    exercise_id: "yes-no".into(),
                    duration_override: None,
                    note: None,
                },
                RoutineStep {
                    exercise_id: "cactus".into(),
                    duration_override: None,
                    note: None,
                },
            ],
        },
        Routine {
            id: "focus-booster".into(),
            name: "Focus State Protocol".into(),
            description: "Sharpens attention before deep work or a big meeting.".into(),
            total_time: "3 min".into(),
            image_prompt: Some("A person in a state of deep focus, surrounded by a calm blue aura, minimalist and professional illustration.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "box-breathing".into(),
                    duration_override: None,
                    note: Some("Focus on the edges".into()),
                },
                RoutineStep {
                    exercise_id: "palming".into(),
                    duration_override: None,
                    note: Some("Rest the visual system".into()),
                },
            ],
        },
        Routine {
            id: "anxiety-switch".into(),
            name: "Anxiety Kill-Switch".into(),
            description: "Rapid reset for when you feel overwhelmed.".into(),
            total_time: "3 min".into(),
            image_prompt: Some("A person transitioning from chaos to calm, soft green and white tones, minimalist and soothing illustration.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "physio-sigh".into(),
                    duration_override: None,
                    note: Some("Offload CO2 fast".into()),
                },
                RoutineStep {
                    exercise_id: "bumble-bee".into(),
                    duration_override: None,
                    note: Some("Stimulate the Vagus nerve".into()),
                },
            ],
        },
        Routine {
            id: "back-rescue".into(),
            name: "The Back Rescue".into(),
            description: "Rehydrate discs and release hip tension.".into(),
            total_time: "4 min".into(),
            image_prompt: Some("A person stretching their back and hips, warm orange and earthy tones, minimalist and relieving illustration.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "figure-4".into(),
                    duration_override: None,
                    note: None,
                },
                RoutineStep {
                    exercise_id: "seated-twist".into(),
                    duration_override: None,
                    note: None,
                },
            ],
        },
        Routine {
            id: "bedtime-winddown".into(),
            name: "Bedtime Wind-down".into(),
            description: "Transition from digital noise to deep sleep.".into(),
            total_time: "5 min".into(),
            image_prompt: Some("A cozy bedroom scene, soft moonlight, a person preparing for sleep, minimalist and peaceful illustration.".into()),
            steps: vec![
                RoutineStep {
                    exercise_id: "4-7-8-breath".into(),
                    duration_override: None,
                    note: Some("The sleeping pill".into()),
                },
                RoutineStep {
                    exercise_id: "belly-breathing".into(),
                    duration_override: None,
                    note: Some("Ground your energy".into()),
                },
            ],
        },
    ]
}
